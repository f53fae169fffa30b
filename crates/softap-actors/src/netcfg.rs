use softap_protocol::{ApConfig, SoftApError};

/// Thin seam to the OS network-configuration service
///
/// The service binds an address to the interface and brings the link up or
/// down. Start failures abort the current start-attempt; stop failures are
/// best-effort, the state machine completes its local teardown regardless
/// and surfaces the error on the diagnostic channel.
pub trait NetworkConfig: Send + 'static {
    /// Start the access point on `interface` with the resolved config
    fn start_access_point(
        &mut self,
        config: &ApConfig,
        interface: &str,
    ) -> Result<(), SoftApError>;

    /// Bring the access point on `interface` down
    fn stop_access_point(&mut self, interface: &str) -> Result<(), SoftApError>;
}
