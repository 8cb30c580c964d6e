mod top_level_tests;
