use embassy_core_contact_impl::ContactFeatureServiceImpl;
use embassy_core_news_impl::NewsFeatureServiceImpl;
use embassy_email_impl::EmailServiceImpl;
use embassy_shared_impl::{rate_limit::MemoryRateLimitServiceImpl, time::TimeServiceImpl};
use embassy_templates_impl::TemplateServiceImpl;

// API
pub type RestServer = embassy_api_rest::RestServer<ContactFeature, NewsFeature>;

// Email
pub type Email = EmailServiceImpl;

// Shared
pub type Time = TimeServiceImpl;
pub type RateLimit = MemoryRateLimitServiceImpl<Time>;

// Templates
pub type Template = TemplateServiceImpl;

// Core
pub type ContactFeature = ContactFeatureServiceImpl<Time, RateLimit, Template, Email>;
pub type NewsFeature = NewsFeatureServiceImpl;
