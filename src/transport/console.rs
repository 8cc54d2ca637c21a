use std::io::{self, BufRead, Write};

use crate::bot::{Controller, Reply, UserId};
use crate::store::ApplicationStore;

/// Resolve a numeric shortcut ("2") to the option shown at that position.
/// Free-text prompts only offer cancel, and there a number is an answer.
fn resolve_choice<'a>(line: &'a str, options: &[&'static str]) -> &'a str {
    if options.len() < 2 {
        return line;
    }
    match line.trim().parse::<usize>() {
        Ok(n) if n >= 1 && n <= options.len() => options[n - 1],
        _ => line,
    }
}

fn render_reply<W: Write>(out: &mut W, reply: &Reply) -> io::Result<()> {
    writeln!(out, "{}", reply.text)?;
    for (idx, option) in reply.options.iter().enumerate() {
        writeln!(out, "  [{}] {}", idx + 1, option)?;
    }
    writeln!(out)?;
    out.flush()
}

/// Feed every line of `input` to the controller as a message from `user`,
/// writing each reply to `output`. Returns the number of messages handled.
pub(crate) fn run_console<S, R, W>(
    controller: &Controller<S>,
    user: UserId,
    input: R,
    mut output: W,
) -> io::Result<usize>
where
    S: ApplicationStore,
    R: BufRead,
    W: Write,
{
    let mut options: Vec<&'static str> = Vec::new();
    let mut handled = 0;

    for line in input.lines() {
        let line = line?;
        let message = resolve_choice(&line, &options);
        let reply = controller.handle(user, message);
        render_reply(&mut output, &reply)?;
        options = reply.options;
        handled += 1;
    }

    tracing::debug!(%user, handled, "console input closed");
    Ok(handled)
}
