pub mod host_clock;
