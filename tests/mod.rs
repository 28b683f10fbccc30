mod zapdesk_tests;
