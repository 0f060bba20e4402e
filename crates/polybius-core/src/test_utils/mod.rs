pub mod mock_random_server;
