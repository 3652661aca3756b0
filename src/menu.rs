//! The interactive console menu driving the dictionary.

use std::io::{BufRead, Write};

use crate::dictionary::Dictionary;
use crate::error::{DictionaryError, Result};
use crate::store::Store;

/// Drives one dictionary (and optionally its backing store) from a
/// line-based input source, rendering to any writer. The menu loops
/// until the user picks Exit or the input reaches end-of-file.
pub struct Menu<'a> {
    dictionary: &'a mut Dictionary,
    store: Option<&'a Store>,
}

impl<'a> Menu<'a> {
    pub fn new(dictionary: &'a mut Dictionary, store: Option<&'a Store>) -> Menu<'a> {
        Menu { dictionary, store }
    }

    pub fn run<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> Result<()> {
        loop {
            writeln!(output)?;
            writeln!(output, "Menu:")?;
            writeln!(output, "1. Add a word")?;
            writeln!(output, "2. Search a word")?;
            writeln!(output, "3. Delete a word")?;
            writeln!(output, "4. View all words")?;
            writeln!(output, "5. Exit")?;
            write!(output, "Enter your choice: ")?;
            output.flush()?;

            let choice = match read_line(input)? {
                Some(line) => line,
                None => break,
            };
            match choice.trim() {
                "1" => self.add(input, output)?,
                "2" => self.search(input, output)?,
                "3" => self.delete(input, output)?,
                "4" => self.view(output)?,
                "5" => {
                    writeln!(output, "Exiting the program...")?;
                    break;
                }
                _ => writeln!(output, "Invalid choice. Please enter a valid option.")?,
            }
        }
        Ok(())
    }

    fn add<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> Result<()> {
        let word = match prompt(input, output, "Enter the word: ")? {
            Some(word) => word,
            None => return Ok(()),
        };
        let meaning = match prompt(input, output, "Enter the meaning: ")? {
            Some(meaning) => meaning,
            None => return Ok(()),
        };
        match self.dictionary.insert(&word, &meaning) {
            Ok(_) => {
                // A write failure leaves the in-memory entry intact; the
                // user is told the entry did not reach the file.
                if let Some(store) = self.store {
                    if let Err(e) = store.append(&word, &meaning) {
                        writeln!(output, "Warning: could not save to file: {}", e)?;
                    }
                }
                writeln!(output, "Word added successfully.")?;
            }
            Err(e @ DictionaryError::InvalidKey { .. }) => writeln!(output, "{}", e)?,
            Err(e) => return Err(e),
        }
        Ok(())
    }

    fn search<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> Result<()> {
        let word = match prompt(input, output, "Enter the word to search: ")? {
            Some(word) => word,
            None => return Ok(()),
        };
        match self.dictionary.search(&word) {
            Ok(Some(meaning)) => writeln!(output, "{}", meaning)?,
            Ok(None) => writeln!(output, "Word not found")?,
            Err(e @ DictionaryError::InvalidKey { .. }) => writeln!(output, "{}", e)?,
            Err(e) => return Err(e),
        }
        Ok(())
    }

    fn delete<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> Result<()> {
        let word = match prompt(input, output, "Enter the word to delete: ")? {
            Some(word) => word,
            None => return Ok(()),
        };
        match self.dictionary.remove(&word) {
            Ok(_) => writeln!(output, "Word deleted if it existed.")?,
            Err(e @ DictionaryError::InvalidKey { .. }) => writeln!(output, "{}", e)?,
            Err(e) => return Err(e),
        }
        Ok(())
    }

    fn view<W: Write>(&self, output: &mut W) -> Result<()> {
        if self.dictionary.is_empty() {
            writeln!(output, "Dictionary is empty.")?;
            return Ok(());
        }
        writeln!(output, "Words in the dictionary:")?;
        for entry in self.dictionary.iter() {
            writeln!(output, "{} - {}", entry.word, entry.meaning)?;
        }
        Ok(())
    }
}

fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> Result<Option<String>> {
    write!(output, "{}", message)?;
    output.flush()?;
    Ok(read_line(input)?.map(|line| line.trim().to_string()))
}

/// Reads one line, or `None` at end-of-file.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(
        line.trim_end_matches(&['\r', '\n'][..]).to_string(),
    ))
}
