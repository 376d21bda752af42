mod parse_bad;
