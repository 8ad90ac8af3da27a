mod error_test;
