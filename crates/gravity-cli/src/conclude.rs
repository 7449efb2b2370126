//! Custom-made solution to output a JSON return message and ensure a
//! return code from a CLI command. The main use-case for this module is
//! to provide a consistent output for commands whose result is consumed
//! by other tooling, such as the unsigned transaction emitted for
//! offline keys.

use core::fmt;
use std::process;

use serde::Serialize;

use crate::prelude::app_reader;

/// Returns true if the application global flag `--json` is enabled.
pub fn json() -> bool {
    app_reader().json_output()
}

/// Functional-style method to exit a program.
pub fn exit_with(out: Output) -> ! {
    // Handle the output message
    if json() {
        println!(
            "{}",
            serde_json::to_string(&out).unwrap_or_else(|e| format!(
                r#"{{"status":"error","result":"cannot serialize output: {}"}}"#,
                e
            ))
        );
    } else {
        println!("{}\n{:#}", out.status, out.result);
    }

    // The return code
    if out.status == Status::Error {
        process::exit(1);
    } else {
        process::exit(0);
    }
}

/// Exits the program. Useful when a type produces an error which can no
/// longer be propagated, and the program must exit instead.
pub fn exit_with_unrecoverable_error<T, E: fmt::Display>(err: E) -> T {
    Output::error(format!("{}", err)).exit()
}

/// A CLI output with support for JSON serialization. The only mandatory
/// field is the `status`, which signals a success (UNIX process return
/// code `0`) or an error (code `1`). An optional `result` can be added.
#[derive(Serialize, Debug)]
pub struct Output {
    /// The return status
    pub status: Status,

    /// The result of a command, such as the output artifact path or the
    /// unsigned transaction document.
    pub result: serde_json::Value,
}

impl Output {
    /// Constructs a new `Output` with the provided `status` and an empty
    /// `result`.
    pub fn new(status: Status) -> Self {
        Output {
            status,
            result: serde_json::Value::Null,
        }
    }

    /// Constructor that returns a new `Output` having a `Success` status.
    pub fn success(result: impl Serialize) -> Self {
        let mut out = Output::new(Status::Success);
        out.result = serialize_result(result);
        out
    }

    /// Constructor that returns a new `Output` having an `Error` status.
    pub fn error(result: impl Serialize) -> Self {
        let mut out = Output::new(Status::Error);
        out.result = serialize_result(result);
        out
    }

    /// Quick-access constructor for an output signalling a success with
    /// a plain message.
    pub fn success_msg(msg: impl ToString) -> Self {
        Output::success(msg.to_string())
    }

    /// Exits from the process with the current output. Convenience
    /// wrapper over `exit_with`.
    pub fn exit(self) -> ! {
        exit_with(self)
    }
}

fn serialize_result(res: impl Serialize) -> serde_json::Value {
    serde_json::to_value(res)
        .unwrap_or_else(|e| serde_json::Value::String(format!("cannot serialize result: {}", e)))
}

/// The result status of a command.
#[derive(Serialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// The command was successful.
    Success,

    /// The command failed.
    Error,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Success => write!(f, "SUCCESS"),
            Status::Error => write!(f, "ERROR"),
        }
    }
}
