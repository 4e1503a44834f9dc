use dnsverify_application::ports::RandomSource;

/// Thread-local `fastrand` generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct FastrandSource;

impl RandomSource for FastrandSource {
    fn index(&self, upper: usize) -> usize {
        if upper == 0 {
            return 0;
        }
        fastrand::usize(..upper)
    }
}
