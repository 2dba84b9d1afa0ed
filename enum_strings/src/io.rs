use std::io::{BufRead, ErrorKind, Write};

use crate::convert::{from_string, to_string, EnumStrings};
use crate::error::Error;

/// Writing values to byte streams as their registered strings. Implemented
/// for every registered enum type, writing exactly the string's bytes.
pub trait Serialize {
    fn serialize<W>(&self, output: &mut W) -> Result<(), Error>
    where
        W: Write;
}

impl<E: EnumStrings> Serialize for E {
    fn serialize<W: Write>(&self, output: &mut W) -> Result<(), Error> {
        output.write_all(to_string(*self)?.as_bytes())?;
        Ok(())
    }
}

/// Reading values back from byte streams. Implemented for every registered
/// enum type: skips leading ASCII whitespace, takes the token up to the next
/// whitespace byte and matches it against the registered strings.
pub trait Deserialize: Sized {
    fn deserialize<R>(input: &mut R) -> Result<Self, Error>
    where
        R: BufRead;
}

impl<E: EnumStrings> Deserialize for E {
    fn deserialize<R: BufRead>(input: &mut R) -> Result<Self, Error> {
        skip_whitespace(input)?;
        let token = String::from_utf8(read_token(input)?)?;
        from_string(&token)
    }
}

/// Consumes input up to the first non-whitespace byte.
fn skip_whitespace<R: BufRead>(input: &mut R) -> Result<(), Error> {
    loop {
        let (taken, done) = {
            let buffer = match input.fill_buf() {
                Ok(buffer) => buffer,
                Err(error) if error.kind() == ErrorKind::Interrupted => continue,
                Err(error) => return Err(error.into()),
            };
            let taken = buffer
                .iter()
                .take_while(|byte| byte.is_ascii_whitespace())
                .count();
            (taken, taken < buffer.len() || buffer.is_empty())
        };
        input.consume(taken);
        if done {
            return Ok(());
        }
    }
}

/// Collects input up to the next ASCII whitespace byte, which stays in the
/// stream. An empty result means the input is exhausted.
fn read_token<R: BufRead>(input: &mut R) -> Result<Vec<u8>, Error> {
    let mut token = Vec::new();
    loop {
        let (taken, done) = {
            let buffer = match input.fill_buf() {
                Ok(buffer) => buffer,
                Err(error) if error.kind() == ErrorKind::Interrupted => continue,
                Err(error) => return Err(error.into()),
            };
            let taken = buffer
                .iter()
                .take_while(|byte| !byte.is_ascii_whitespace())
                .count();
            token.extend_from_slice(&buffer[..taken]);
            (taken, taken < buffer.len() || buffer.is_empty())
        };
        input.consume(taken);
        if done {
            return Ok(token);
        }
    }
}
