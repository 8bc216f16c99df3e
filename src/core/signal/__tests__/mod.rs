mod detrend_test;
mod interpolate_test;
