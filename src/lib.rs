pub mod block;
pub mod border;
pub mod btree_key_values;
pub mod constants;
pub mod corridor;
pub mod dungeon;
pub mod gen;
pub mod placement;
pub mod position;
pub mod room;
pub mod way;
