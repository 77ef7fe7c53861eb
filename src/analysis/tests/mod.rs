mod readability_tests;
mod tokenizer_tests;
