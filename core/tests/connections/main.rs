mod bridges;
mod neighbors;
