//! Application-local prelude: conveniently import types/functions/macros
//! which are generally useful and should be available in every module with
//! `use crate::prelude::*;`

pub use abscissa_core::{Application, Command, Runnable};

pub use crate::application::{app_config, app_reader};
