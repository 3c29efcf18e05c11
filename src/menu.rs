use std::io::{self, BufRead, Write};

use crate::frequency_table::FrequencyTable;
use crate::loader::{normalize_line, read_line_lossy};
use crate::report::{render_histogram, render_list, HistogramStyle};

const MENU_TEXT: &str = "\n===== Corner Grocer Menu =====\n\
1. Lookup item frequency\n\
2. Print all item frequencies\n\
3. Print histogram\n\
4. Exit\n\
Choose an option (1-4): ";
const INVALID_SELECTION: &str = "Invalid selection. Please enter 1, 2, 3, or 4.";
const ITEM_PROMPT: &str = "Enter item to search: ";
const FAREWELL: &str = "Exiting program.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    Lookup,
    ListAll,
    Histogram,
    Exit,
}

impl MenuChoice {
    /// Accepts exactly the integers 1 through 4, surrounding whitespace aside.
    pub fn parse(selection: &str) -> Option<Self> {
        let choice_id: i64 = selection.trim().parse().ok()?;
        match choice_id {
            1 => Some(MenuChoice::Lookup),
            2 => Some(MenuChoice::ListAll),
            3 => Some(MenuChoice::Histogram),
            4 => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Running,
    Exiting,
}

pub struct Menu<'a, R, W> {
    table: &'a FrequencyTable,
    histogram: HistogramStyle,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(table: &'a FrequencyTable, histogram: HistogramStyle, input: R, output: W) -> Self {
        Self {
            table,
            histogram,
            input,
            output,
        }
    }

    pub fn run(&mut self) -> io::Result<()> {
        let mut state = State::Running;
        while state == State::Running {
            state = match self.read_choice()? {
                Some(choice) => self.dispatch(choice)?,
                None => {
                    log::debug!("Console input closed");
                    writeln!(self.output)?;
                    self.farewell()?
                }
            };
        }
        self.output.flush()
    }

    fn dispatch(&mut self, choice: MenuChoice) -> io::Result<State> {
        log::debug!("Menu selection: {:?}", choice);
        match choice {
            MenuChoice::Lookup => {
                write!(self.output, "{}", ITEM_PROMPT)?;
                self.output.flush()?;
                let Some(line) = self.read_line()? else {
                    writeln!(self.output)?;
                    return self.farewell();
                };
                let item = normalize_line(&line);
                writeln!(self.output, "{} {}", item, self.table.frequency_of(item))?;
            }
            MenuChoice::ListAll => {
                for line in render_list(self.table.entries()) {
                    writeln!(self.output, "{}", line)?;
                }
            }
            MenuChoice::Histogram => {
                for line in render_histogram(self.table.entries(), self.histogram) {
                    writeln!(self.output, "{}", line)?;
                }
            }
            MenuChoice::Exit => return self.farewell(),
        }
        Ok(State::Running)
    }

    /// Re-prompts until a valid selection arrives. `None` means the input is exhausted.
    fn read_choice(&mut self) -> io::Result<Option<MenuChoice>> {
        loop {
            write!(self.output, "{}", MENU_TEXT)?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            // The whole line was consumed, so leftovers never reach the next read.
            match MenuChoice::parse(&line) {
                Some(choice) => return Ok(Some(choice)),
                None => writeln!(self.output, "{}", INVALID_SELECTION)?,
            }
        }
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        read_line_lossy(&mut self.input)
    }

    fn farewell(&mut self) -> io::Result<State> {
        writeln!(self.output, "{}", FAREWELL)?;
        Ok(State::Exiting)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn table() -> FrequencyTable {
        let mut table = FrequencyTable::new();
        table.insert("Apples", 3);
        table.insert("Bananas", 1);
        table.insert("Oranges", 1);
        table
    }

    fn run_session(input: &str) -> String {
        let table = table();
        let mut output = Vec::new();
        Menu::new(&table, HistogramStyle::default(), Cursor::new(input), &mut output)
            .run()
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_parse_accepts_one_through_four() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::Lookup));
        assert_eq!(MenuChoice::parse("2\n"), Some(MenuChoice::ListAll));
        assert_eq!(MenuChoice::parse(" 3\r\n"), Some(MenuChoice::Histogram));
        assert_eq!(MenuChoice::parse("4"), Some(MenuChoice::Exit));
    }

    #[test]
    fn test_parse_rejects_everything_else() {
        for selection in ["0", "5", "abc", "", "\n", "-1", "2abc", "1 2", "99999999999999999999"] {
            assert_eq!(MenuChoice::parse(selection), None, "accepted {:?}", selection);
        }
    }

    #[test]
    fn test_exit_prints_farewell() {
        let output = run_session("4\n");
        assert!(output.contains("===== Corner Grocer Menu ====="));
        assert!(output.ends_with("Exiting program.\n"));
    }

    #[test]
    fn test_invalid_selections_reprompt() {
        let output = run_session("0\n5\nabc\n\n4\n");
        assert_eq!(output.matches(INVALID_SELECTION).count(), 4);
        assert_eq!(output.matches("Choose an option (1-4): ").count(), 5);
        assert!(output.ends_with("Exiting program.\n"));
    }

    #[test]
    fn test_trailing_garbage_does_not_leak_into_next_read() {
        let output = run_session("abc def 1\n4\n");
        assert_eq!(output.matches(INVALID_SELECTION).count(), 1);
        assert!(!output.contains(ITEM_PROMPT));
        assert!(output.ends_with("Exiting program.\n"));
    }

    #[test]
    fn test_lookup_present_and_absent_items() {
        let output = run_session("1\nApples\n1\nGrapes  \r\n1\napples\n4\n");
        assert!(output.contains("Apples 3\n"));
        assert!(output.contains("Grapes 0\n"));
        assert!(output.contains("apples 0\n"));
    }

    #[test]
    fn test_lookup_reads_whole_line() {
        let output = run_session("1\nGreen Beans\n4\n");
        assert!(output.contains("Green Beans 0\n"));
    }

    #[test]
    fn test_list_all_in_order() {
        let output = run_session("2\n4\n");
        assert!(output.contains("Apples 3\nBananas 1\nOranges 1\n"));
    }

    #[test]
    fn test_histogram_output() {
        let output = run_session("3\n4\n");
        assert!(output.contains(&format!("{:<15} ***\n", "Apples")));
        assert!(output.contains(&format!("{:<15} *\n", "Bananas")));
        assert!(output.contains(&format!("{:<15} *\n", "Oranges")));
    }

    #[test]
    fn test_non_utf8_selection_reprompts() {
        let table = table();
        let mut output = Vec::new();
        Menu::new(&table, HistogramStyle::default(), Cursor::new(&b"\xe9\n4\n"[..]), &mut output)
            .run()
            .unwrap();
        let output = String::from_utf8(output).unwrap();

        assert_eq!(output.matches(INVALID_SELECTION).count(), 1);
        assert!(output.ends_with("Exiting program.\n"));
    }

    #[test]
    fn test_non_utf8_lookup_reports_zero() {
        let table = table();
        let mut output = Vec::new();
        Menu::new(&table, HistogramStyle::default(), Cursor::new(&b"1\nCaf\xe9\n4\n"[..]), &mut output)
            .run()
            .unwrap();
        let output = String::from_utf8(output).unwrap();

        assert!(output.contains("Caf\u{FFFD} 0\n"));
        assert!(output.ends_with("Exiting program.\n"));
    }

    #[test]
    fn test_end_of_input_exits_loop() {
        let output = run_session("2\n");
        assert!(output.ends_with("Exiting program.\n"));

        let output = run_session("1\n");
        assert!(output.ends_with("Exiting program.\n"));
        assert!(!output.contains(" 0\n"));
    }
}
