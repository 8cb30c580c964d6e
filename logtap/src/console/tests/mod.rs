mod console_tests;
