//! Adapters — concrete implementations of the port traits.
//!
//! | Adapter       | Implements   | Connects to                        |
//! |---------------|--------------|------------------------------------|
//! | `config_file` | ConfigPort   | JSON file under `/etc`             |
//! | `gpio`        | GpioPort     | Raspberry Pi GPIO via `rppal`      |
//! | `log_sink`    | EventSink    | `log` facade                       |
//! | `notify`      | NotifyPort   | `wall` broadcast                   |
//! | `power`       | PowerPort    | `shutdown -h now` (or dry run)     |
//! | `signals`     | —            | SIGINT / SIGTERM stop flag         |
//! | `time`        | DelayNs      | `std::thread::sleep`               |

pub mod config_file;
#[cfg(feature = "rpi")]
pub mod gpio;
pub mod log_sink;
pub mod notify;
pub mod power;
pub mod signals;
pub mod time;
