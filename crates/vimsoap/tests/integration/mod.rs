mod config;
mod fault_chain;
mod json_protocol;
mod soap_envelope;
