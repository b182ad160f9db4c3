mod news;
