pub mod braille;
pub mod chart;
pub mod frame;
pub mod hbar;
pub mod tty_raw;
pub mod viewer;

pub use braille::{BraillePlot, DotSpan};
pub use chart::{Chart, Series};
pub use frame::Renderer;
pub use viewer::{TerminalViewer, Viewer};
