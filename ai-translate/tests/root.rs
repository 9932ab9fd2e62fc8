mod fake_page;
