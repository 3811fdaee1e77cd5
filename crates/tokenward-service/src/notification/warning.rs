//! The IP-change warning message.

/// Subject line of the IP-change warning.
pub const IP_CHANGE_SUBJECT: &str = "IP Address Change Warning";

/// Warning sent when a refresh arrives from a different address than the
/// one its access token was issued to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IpChangeWarning<'a> {
    /// Address bound into the access token.
    pub old_ip: &'a str,
    /// Address the refresh came from.
    pub new_ip: &'a str,
}

impl<'a> IpChangeWarning<'a> {
    /// Creates a warning for the given address change.
    pub fn new(old_ip: &'a str, new_ip: &'a str) -> Self {
        Self { old_ip, new_ip }
    }

    /// Message subject.
    pub fn subject(&self) -> &'static str {
        IP_CHANGE_SUBJECT
    }

    /// Message body.
    pub fn body(&self) -> String {
        format!(
            "Your IP address has changed from {} to {}.",
            self.old_ip, self.new_ip
        )
    }
}
