use softap_protocol::SoftApError;

/// Thin seam to the native radio driver
///
/// The state machine only sequences calls to this interface; parameter
/// computation (channel selection, country-code formatting) happens upstream
/// and the implementation is assumed correct. Calls are synchronous and
/// bounded from the state machine's perspective.
pub trait RadioControl: Send + 'static {
    /// Is the radio subsystem currently active?
    fn is_active(&self) -> bool;

    /// Bring the radio subsystem up
    ///
    /// Only called when [`is_active`](Self::is_active) reported false.
    fn activate(&mut self) -> Result<(), SoftApError>;

    /// Push a country code to the driver; returns false on rejection
    ///
    /// The state machine normalizes the code to upper case before calling.
    fn set_country_code(&mut self, code: &str) -> bool;

    /// Name of the single managed interface
    ///
    /// Queried once at state-machine construction and fixed for the
    /// instance's lifetime.
    fn interface_name(&self) -> String;
}
