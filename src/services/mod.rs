pub mod flash_service;
