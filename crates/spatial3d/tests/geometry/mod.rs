mod collision_query;
mod spatial_index_random;
mod spatial_index_scenario;
mod swept_collision;
