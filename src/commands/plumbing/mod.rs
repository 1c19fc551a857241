pub mod cat_file;
pub mod hash_object;
pub mod read_tree;
pub mod write_tree;
