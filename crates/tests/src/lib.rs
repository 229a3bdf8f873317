#[cfg(test)]
mod common;

#[cfg(test)]
mod contact_gateway_tests;

#[cfg(test)]
mod user_gateway_tests;

#[cfg(test)]
mod listing_gateway_tests;

#[cfg(test)]
mod error_gateway_tests;
