pub mod todo_controller;
