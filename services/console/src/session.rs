use parking_attendant::desk::{FrontDesk, RequestError};
use std::io::{self, BufRead, Write};
use tracing::debug;

const SEPARATOR: &str = "-------------------";
const MENU: &str = "Parking Lot\n\
    1. Setup\n\
    2. Park\n\
    3. Un Park\n\
    4. Status\n\
    5. Change Strategy\n\
    6. Exit";

/// Interactive menu loop. Ends on the exit choice or when input runs dry.
pub(crate) fn run_console<R, W>(desk: &mut FrontDesk, input: R, mut output: W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut lines = input.lines();

    loop {
        writeln!(output, "{SEPARATOR}")?;
        writeln!(output, "{MENU}")?;
        let Some(choice) = prompt(&mut lines, &mut output, "input menu: ")? else {
            break;
        };

        let outcome = match choice.trim() {
            "1" => match prompt(&mut lines, &mut output, "input parking lot capacities: ")? {
                Some(capacities) => desk.setup(&capacities),
                None => break,
            },
            "2" => match prompt(&mut lines, &mut output, "input plate number: ")? {
                Some(plate_number) => desk.park(&plate_number),
                None => break,
            },
            "3" => match prompt(&mut lines, &mut output, "input ticket id: ")? {
                Some(ticket) => desk.unpark(&ticket),
                None => break,
            },
            "4" => desk.status(),
            "5" => match prompt(
                &mut lines,
                &mut output,
                "input strategy (first-available, highest-capacity, highest-free-space): ",
            )? {
                Some(name) => desk.change_strategy(&name),
                None => break,
            },
            "6" => break,
            _ => {
                writeln!(output, "invalid menu")?;
                continue;
            }
        };

        respond(&mut output, outcome)?;
    }

    output.flush()
}

fn prompt<B, W>(lines: &mut io::Lines<B>, output: &mut W, text: &str) -> io::Result<Option<String>>
where
    B: BufRead,
    W: Write,
{
    write!(output, "{text}")?;
    output.flush()?;
    lines.next().transpose()
}

pub(crate) fn respond<W: Write>(
    output: &mut W,
    outcome: Result<String, RequestError>,
) -> io::Result<()> {
    match outcome {
        Ok(message) => writeln!(output, "{}", message.trim_end()),
        Err(err) => {
            debug!(error = %err, "request refused");
            writeln!(output, "{err}")
        }
    }
}
