mod helpers;
mod login_test;
mod profile_test;
mod router_test;
