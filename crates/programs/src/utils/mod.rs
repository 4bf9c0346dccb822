mod reflink;
