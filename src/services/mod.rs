pub mod provision_service;
pub use provision_service::{
    CreatedUser, ProvisionError, ProvisionOutcome, ProvisionService, StoreError, UserStore,
};

pub mod provision_service_impl;
pub use provision_service_impl::SeaOrmUserStore;
