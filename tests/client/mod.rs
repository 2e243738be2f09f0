mod send_tests;
