pub mod response_interpreter;

pub use response_interpreter::ResponseInterpreter;
