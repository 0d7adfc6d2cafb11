pub mod admins_file_writer;
