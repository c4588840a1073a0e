use folio_core_contact_impl::ContactFeatureServiceImpl;
use folio_extern_impl::contact::ContactApiServiceImpl;

// API
pub type RestServer = folio_api_rest::RestServer<ContactFeature>;

// Extern
pub type ContactApi = ContactApiServiceImpl;

// Core
pub type ContactFeature = ContactFeatureServiceImpl;
