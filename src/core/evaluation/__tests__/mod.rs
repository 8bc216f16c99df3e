mod high_order_test;
mod deviation_test;
