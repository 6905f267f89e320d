mod helpers;
mod reservation_test;
mod token_test;
