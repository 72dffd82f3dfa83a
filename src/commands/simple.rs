//! Simple interactive drill mode
//!
//! Line-based drill loop without TUI. Lines starting with `:` are commands,
//! anything else is an answer.

use crate::core::Side;
use crate::drill::{
    DrillMode, DrillablePattern, GuessOutcome, ProtocolSnapshot, RepeatOutcome, Session,
    SessionSnapshot,
};
use crate::error::SessionError;
use std::io::{self, BufRead, Write};

const HELP: &str = "Commands: :reveal  :next  :skip  :score  :help  :quit";

/// Run the simple drill loop on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple(session: &mut Session, mode: DrillMode) -> io::Result<SessionSnapshot> {
    let stdin = io::stdin();
    run_simple_with(session, mode, stdin.lock(), io::stdout())
}

/// Run the simple drill loop over any input and output
///
/// Stops on `:quit` or end of input and returns the final session state. The
/// session is left active so the caller can inspect it.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple_with<R: BufRead, W: Write>(
    session: &mut Session,
    mode: DrillMode,
    input: R,
    mut out: W,
) -> io::Result<SessionSnapshot> {
    if let Err(err) = session.start(mode) {
        writeln!(out, "❌ Cannot start: {err}")?;
        return Ok(session.snapshot());
    }

    writeln!(out, "\nDrilling {} patterns in {mode} mode.", session.selected().len())?;
    writeln!(out, "{HELP}\n")?;
    write_prompt(&mut out, &session.snapshot())?;

    for line in input.lines() {
        let line = line?;
        let trimmed = line.trim();

        match trimmed {
            ":quit" | ":q" | ":exit" => break,
            ":help" | ":h" => writeln!(out, "{HELP}")?,
            ":score" => write_score(&mut out, &session.snapshot())?,
            ":reveal" | ":r" => reveal(session, &mut out)?,
            ":next" | ":n" => {
                if let Err(err) = session.advance() {
                    writeln!(out, "❌ {err}")?;
                }
            }
            ":skip" | ":s" => match session.skip() {
                Ok(true) => writeln!(out, "⏭  Skipped")?,
                Ok(false) => writeln!(out, "Nothing to skip")?,
                Err(err) => writeln!(out, "❌ {err}")?,
            },
            answer => answer_line(session, answer, &mut out)?,
        }

        write_prompt(&mut out, &session.snapshot())?;
    }

    let snapshot = session.snapshot();
    writeln!(out)?;
    write_score(&mut out, &snapshot)?;
    Ok(snapshot)
}

fn answer_line<W: Write>(session: &mut Session, answer: &str, out: &mut W) -> io::Result<()> {
    match session.mode() {
        Some(DrillMode::FindWords) => match session.submit_guess(answer) {
            Ok(GuessOutcome::Correct(word)) => writeln!(out, "✅ {word}")?,
            Ok(GuessOutcome::Incorrect) => writeln!(out, "✗ Not in the list")?,
            Ok(GuessOutcome::Duplicate) => writeln!(out, "Already tried")?,
            Ok(GuessOutcome::Ignored) => {}
            Err(err) => report(out, &err)?,
        },
        Some(DrillMode::RepeatAfterMe) => match session.submit_repetition(answer) {
            Ok(RepeatOutcome::Repeated { count }) => writeln!(out, "✓ {count}")?,
            Ok(RepeatOutcome::Hidden) => writeln!(out, "👀 Now from memory")?,
            Ok(RepeatOutcome::Recalled { completed: false }) => writeln!(out, "✅ Recalled")?,
            Ok(RepeatOutcome::Recalled { completed: true }) => {
                writeln!(out, "🎉 Pattern complete! Type :next to continue")?;
            }
            Ok(RepeatOutcome::Incorrect) => writeln!(out, "✗ Try again")?,
            Ok(RepeatOutcome::Ignored) => {}
            Err(err) => report(out, &err)?,
        },
        None => report(out, &SessionError::NotActive)?,
    }
    Ok(())
}

fn reveal<W: Write>(session: &mut Session, out: &mut W) -> io::Result<()> {
    if let Err(err) = session.reveal() {
        return report(out, &err);
    }
    if let Ok(challenge) = session.current_challenge() {
        let words: Vec<&str> = challenge.words().iter().map(|w| w.text()).collect();
        writeln!(out, "Answers: {}", words.join(", "))?;
    }
    Ok(())
}

fn report<W: Write>(out: &mut W, err: &SessionError) -> io::Result<()> {
    writeln!(out, "❌ {err}")
}

fn write_score<W: Write>(out: &mut W, snapshot: &SessionSnapshot) -> io::Result<()> {
    let accuracy = snapshot
        .accuracy()
        .map_or_else(|| "-".to_string(), |a| format!("{a:.0}%"));
    writeln!(
        out,
        "Score: {}/{} ({accuracy})",
        snapshot.correct_answers, snapshot.total_attempts
    )
}

fn write_prompt<W: Write>(out: &mut W, snapshot: &SessionSnapshot) -> io::Result<()> {
    let Some(challenge) = &snapshot.challenge else {
        writeln!(out, "Current pattern is no longer available. Type :next or :quit")?;
        return Ok(());
    };
    let position = snapshot.challenge_position().unwrap_or(1);
    let (done, total) = snapshot.challenge_progress().unwrap_or((0, challenge.count()));

    writeln!(
        out,
        "────────────────────────────────────────────────────────────"
    )?;
    writeln!(
        out,
        "Pattern {position}/{}: {} ({done}/{total})",
        snapshot.selected.len(),
        challenge.key()
    )?;

    match &snapshot.protocol {
        Some(ProtocolSnapshot::FindWords { revealed: true, .. }) => {
            writeln!(out, "Answers shown. Type :next to continue")?;
        }
        Some(ProtocolSnapshot::FindWords { .. }) if done >= total => {
            writeln!(out, "🎉 All words found! Type :next to continue")?;
        }
        Some(ProtocolSnapshot::FindWords { .. }) => {
            writeln!(out, "Type the missing part of a word {}", side_hint(challenge))?;
        }
        Some(ProtocolSnapshot::RepeatAfterMe { completed: true, .. }) => {
            writeln!(out, "Pattern complete. Type :next to continue")?;
        }
        Some(ProtocolSnapshot::RepeatAfterMe {
            word_index,
            repeat_count,
            hide_word,
            ..
        }) => {
            if *hide_word {
                writeln!(out, "Type the hidden word from memory")?;
            } else if let Some(word) = challenge.words().get(*word_index) {
                writeln!(out, "Type: {word}  [{repeat_count}]")?;
            }
        }
        None => {}
    }
    write!(out, "> ")?;
    out.flush()
}

fn side_hint(challenge: &DrillablePattern) -> String {
    match challenge.side() {
        Side::Ends => format!("ending in '{}'", challenge.pattern()),
        Side::Starts => format!("starting with '{}'", challenge.pattern()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drill::build_drill_set;
    use crate::index::{AffixIndex, Vocabulary, aggregate};
    use crate::wordlists::loader::words_from_slice;

    fn session() -> Session {
        let words = words_from_slice(&["walking", "talking", "running"]);
        let records = aggregate(
            &AffixIndex::build(&words),
            &Vocabulary::from_pairs([("ing", 3)]),
        );
        let mut session = Session::new(build_drill_set(&records));
        session.select_all();
        session
    }

    fn run(mode: DrillMode, script: &str) -> (SessionSnapshot, String) {
        let mut session = session();
        let mut output = Vec::new();
        let snapshot = run_simple_with(&mut session, mode, script.as_bytes(), &mut output).unwrap();
        (snapshot, String::from_utf8(output).unwrap())
    }

    #[test]
    fn find_mode_script() {
        let (snapshot, output) = run(DrillMode::FindWords, "walk\nwalk\nsing\n:reveal\n:quit\n");

        assert_eq!(snapshot.correct_answers, 1);
        assert_eq!(snapshot.total_attempts, 2);
        assert!(output.contains("✅ walking"));
        assert!(output.contains("Already tried"));
        assert!(output.contains("Answers: walking, talking, running"));
    }

    #[test]
    fn repeat_mode_script() {
        let (snapshot, output) = run(
            DrillMode::RepeatAfterMe,
            "walking\nwalking\nwalking\nwalking\n:skip\n",
        );

        assert_eq!(snapshot.correct_answers, 1);
        assert_eq!(snapshot.total_attempts, 4);
        assert!(output.contains("Now from memory"));
        assert!(output.contains("Skipped"));
        assert!(matches!(
            snapshot.protocol,
            Some(ProtocolSnapshot::RepeatAfterMe { word_index: 2, .. })
        ));
    }

    #[test]
    fn empty_selection_reports_and_stops() {
        let mut session = session();
        session.clear_selection();
        let mut output = Vec::new();
        let snapshot =
            run_simple_with(&mut session, DrillMode::FindWords, "walk\n".as_bytes(), &mut output)
                .unwrap();

        assert!(!snapshot.is_active());
        assert!(String::from_utf8(output).unwrap().contains("no patterns selected"));
    }
}
