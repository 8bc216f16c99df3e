mod harmonic_test;
