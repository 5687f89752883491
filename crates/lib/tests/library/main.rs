mod edit_tests;
mod navigate_tests;
