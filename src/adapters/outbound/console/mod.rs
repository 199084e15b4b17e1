/// Console adapters for terminal output
mod console_presenter;

pub use console_presenter::ConsolePresenter;
