//! Status line demo: two cursors composing one line, rendered with crossterm.
//!
//! Statline never decodes rendition values; this demo plays the role of the
//! rendering collaborator and interprets the low byte of each value as an
//! ANSI color index.

use crossterm::execute;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use statline::{Buffer, Cursor, Rendition};
use std::io;
use std::time::{SystemTime, UNIX_EPOCH};

#[allow(clippy::cast_possible_truncation)]
fn main() -> io::Result<()> {
    let mut buf = Buffer::new();

    // Left section: session name plus a window title fitted to 20 columns.
    let mut left = Cursor::new();
    buf.record_rendition(Rendition::from_raw(10), 0);
    left.copy_bounded(&mut buf, "statline ", usize::MAX);
    buf.record_rendition(Rendition::from_raw(7), left.offset());
    left.copy_fit(&mut buf, "0 demo window with a long title", 20);

    // Right section: a clock appended by an independent cursor.
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_secs());
    let mut right = left;
    buf.record_rendition(Rendition::from_raw(14), right.offset());
    right
        .format(
            &mut buf,
            format_args!(
                " | {:02}:{:02}:{:02}",
                secs / 3600 % 24,
                secs / 60 % 60,
                secs % 60
            ),
        )
        .expect("clock fits in a growable buffer");

    right.finish(&mut buf);

    // Render: emit the literal bytes, switching color wherever the log
    // marks a change.
    let entries = buf.renditions_sorted();
    let text = buf.as_str().unwrap_or_default();
    let mut stdout = io::stdout();
    for (i, ch) in text.char_indices() {
        for entry in entries.iter().filter(|e| e.offset == i) {
            let index = (entry.rendition.raw() & 0xFF) as u8;
            execute!(stdout, SetForegroundColor(Color::AnsiValue(index)))?;
        }
        execute!(stdout, Print(ch))?;
    }
    execute!(stdout, ResetColor, Print('\n'))?;

    Ok(())
}
