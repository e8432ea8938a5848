/// Answers whether the device can currently reach the network.
pub trait ConnectivityObserver: Send + Sync {
    fn has_internet_connection(&self) -> bool;
}

/// Connectivity fixed at construction.
#[derive(Debug, Clone, Copy)]
pub struct StaticConnectivity {
    online: bool,
}

impl StaticConnectivity {
    pub fn online() -> Self {
        Self { online: true }
    }

    pub fn offline() -> Self {
        Self { online: false }
    }
}

impl ConnectivityObserver for StaticConnectivity {
    fn has_internet_connection(&self) -> bool {
        self.online
    }
}
