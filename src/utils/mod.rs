// Utilities shared by the library and the command-line front end

pub mod paths;
