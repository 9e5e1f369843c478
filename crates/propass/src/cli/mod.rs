pub mod propass;
