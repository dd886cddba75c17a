mod change_relay;

pub use change_relay::ChangeRelay;
