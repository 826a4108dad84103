mod greedy_split;
mod random_polygons;
