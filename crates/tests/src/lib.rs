#[cfg(test)]
mod common;

#[cfg(test)]
mod backend_client_tests;

#[cfg(test)]
mod auth_gate_tests;


#[cfg(test)]
mod subject_delete_tests;

#[cfg(test)]
mod subject_update_tests;

#[cfg(test)]
mod health_tests;
