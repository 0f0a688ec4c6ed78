pub mod assembler;
pub mod formatter;
pub mod html;
