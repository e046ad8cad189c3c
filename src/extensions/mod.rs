pub mod enums;
pub mod string;
