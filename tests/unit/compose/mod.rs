mod tiles;
