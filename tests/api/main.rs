mod healthcheck;
mod helpers;
