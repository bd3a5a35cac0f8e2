use super::*;

mod number_constructor_and_globals;
