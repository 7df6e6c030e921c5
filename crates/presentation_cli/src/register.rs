//! Interactive, line-based registration
//!
//! Each entered line is one input event; feedback is printed as soon as the
//! line is handled. Rejected submissions re-prompt only the failing fields.

use std::io::{BufRead, Write};

use application::{ApplicationError, EventOutcome, FormEvent, RegistrationService};
use domain::{DomainError, FieldId, FormState, Registration};
use tracing::debug;

use crate::console_view::ConsoleFormView;

/// Run the form until it is submitted or the input ends
///
/// Returns `None` when the input ends before a successful submission.
///
/// # Errors
///
/// Returns an error if reading input fails.
pub fn run<R, W>(form: FormState, mut input: R, out: W) -> anyhow::Result<Option<Registration>>
where
    R: BufRead,
    W: Write,
{
    let mut service = RegistrationService::new(form, ConsoleFormView::new(out));
    let mut pending: Vec<FieldId> = FieldId::ALL.to_vec();

    loop {
        for field in pending {
            if !ask(&mut service, &mut input, field)? {
                service.view_mut().say(format_args!("\n👋 Registration aborted"));
                return Ok(None);
            }
        }

        match service.handle(FormEvent::Submit)? {
            EventOutcome::Submitted(registration) => return Ok(Some(registration)),
            EventOutcome::Rejected(invalid) => {
                debug!(?invalid, "Re-prompting rejected fields");
                service
                    .view_mut()
                    .say(format_args!("\nPlease correct the fields above."));
                pending = invalid;
            },
            EventOutcome::Updated { .. } => anyhow::bail!("submit did not produce a verdict"),
        }
    }
}

/// Prompt for one field until the entry is accepted as an event
///
/// Returns `false` at end of input.
fn ask<R, W>(
    service: &mut RegistrationService<ConsoleFormView<W>>,
    input: &mut R,
    field: FieldId,
) -> anyhow::Result<bool>
where
    R: BufRead,
    W: Write,
{
    loop {
        let prompt = if field == FieldId::Events {
            format!(
                "{} ({})",
                field.label(),
                service.form().event_options().join(", ")
            )
        } else {
            field.label().to_string()
        };
        service.view_mut().prompt(&prompt);

        let Some(line) = read_line(input)? else {
            return Ok(false);
        };

        let result = if field == FieldId::Events {
            let chosen: Vec<&str> = line
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .collect();
            service.select_events(&chosen)
        } else {
            service.handle(FormEvent::Input { field, value: line })
        };

        match result {
            Ok(_) => return Ok(true),
            Err(ApplicationError::Domain(DomainError::UnknownEvent(option))) => {
                service
                    .view_mut()
                    .say(format_args!("  ⚠️  Unknown event: {option}"));
            },
            Err(e) => return Err(e.into()),
        }
    }
}

/// One line without its line ending, `None` at end of input
fn read_line<R: BufRead>(input: &mut R) -> std::io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed_len);
    Ok(Some(line))
}
