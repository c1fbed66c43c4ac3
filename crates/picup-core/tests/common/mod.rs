pub mod picgo_server;
